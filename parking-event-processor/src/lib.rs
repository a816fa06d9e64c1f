//! Lambda function that echoes the body of every SQS message in a batch to stdout.
//!
//! Bodies are written one per line, in delivery order. Diagnostic logging goes to
//! stderr so stdout carries nothing but message bodies.

pub mod handler;
pub mod telemetry;

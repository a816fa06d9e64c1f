use std::io::{self, Write};

use anyhow::{Context, Result};
use aws_lambda_events::event::sqs::{SqsEvent, SqsMessage};
use lambda_runtime::{Error, LambdaEvent};
use tracing::{debug, info};

/// Write the body of each message to `out`, one line per message, in delivery order.
///
/// Missing and empty bodies are written as empty lines. The sink is flushed once after
/// the last message. Returns the number of lines written.
pub fn write_bodies<W: Write>(records: &[SqsMessage], out: &mut W) -> Result<usize> {
    for record in records {
        let message_id = record.message_id.as_deref().unwrap_or_default();
        debug!("Writing body of message: {}", message_id);

        writeln!(out, "{}", record.body.as_deref().unwrap_or_default())
            .with_context(|| format!("Failed to write body of message {}", message_id))?;
    }

    out.flush().context("Failed to flush output")?;
    Ok(records.len())
}

/// Lambda handler function
pub async fn function_handler(event: LambdaEvent<SqsEvent>) -> Result<(), Error> {
    let records = &event.payload.records;
    info!(
        "Processing {} messages for request_id: {}",
        records.len(),
        event.context.request_id
    );

    write_bodies(records, &mut io::stdout().lock())?;
    Ok(())
}

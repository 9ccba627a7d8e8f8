// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//======================================================================================================================
// Imports
//======================================================================================================================

use ::anyhow::Result;
use ::crossbeam_channel::{
    Receiver,
    Sender,
};
use ::dot3gen::{
    dispatch::{
        ErrorResponse,
        Request,
    },
    ensure_eq,
    generator::DOT3_INCR_LEN_NAME,
    Dispatcher,
    Dot3IncrLen,
    ResponseRecord,
};
use ::std::{
    sync::Arc,
    thread::{
        self,
        JoinHandle,
    },
};

//======================================================================================================================
// Helpers
//======================================================================================================================

fn new_dispatcher() -> Result<Dispatcher> {
    let mut dispatcher: Dispatcher = Dispatcher::new();
    dispatcher.register(Arc::new(Dot3IncrLen::new()))?;
    Ok(dispatcher)
}

fn declared_length(response: &str) -> Result<u16> {
    let bytes: Vec<u8> = ResponseRecord::from_json(response)?.to_bytes()?;
    Ok(u16::from_be_bytes([bytes[12], bytes[13]]))
}

//======================================================================================================================
// Tests
//======================================================================================================================

/// Each request line gets exactly one response line, in order.
#[test]
fn serve_answers_every_request() -> Result<()> {
    let dispatcher: Dispatcher = new_dispatcher()?;

    let mut input: String = String::new();
    for request in ["{}", "", "anything"] {
        input.push_str(&Request::new(DOT3_INCR_LEN_NAME, request).to_json()?);
        input.push('\n');
    }

    let mut output: Vec<u8> = Vec::new();
    let served: usize = dispatcher.serve(input.as_bytes(), &mut output)?;
    ensure_eq!(served, 3);

    let output: String = String::from_utf8(output)?;
    let lines: Vec<&str> = output.lines().collect();
    ensure_eq!(lines.len(), 3);
    for (line, expected) in lines.iter().zip([50u16, 51, 52]) {
        ensure_eq!(declared_length(line)?, expected);
    }
    Ok(())
}

/// Bad lines produce an error line and do not advance the generator.
#[test]
fn serve_reports_errors_and_continues() -> Result<()> {
    let dispatcher: Dispatcher = new_dispatcher()?;
    let input: String = [
        r#"{"handler":"dot3_incr_len","request":"{}"}"#,
        r#"{"handler":"no_such_handler","request":"{}"}"#,
        "this is not json",
        r#"{"handler":"dot3_incr_len"}"#,
    ]
    .join("\n");

    let mut output: Vec<u8> = Vec::new();
    ensure_eq!(dispatcher.serve(input.as_bytes(), &mut output)?, 4);

    let output: String = String::from_utf8(output)?;
    let lines: Vec<&str> = output.lines().collect();
    ensure_eq!(lines.len(), 4);
    ensure_eq!(declared_length(lines[0])?, 50);
    for line in &lines[1..3] {
        let error: ErrorResponse = serde_json::from_str(line)?;
        if error.error.is_empty() {
            anyhow::bail!("error line without a cause");
        }
    }
    ensure_eq!(declared_length(lines[3])?, 51);
    Ok(())
}

/// A dispatcher shared across threads hands out every length once.
#[test]
fn concurrent_dispatch() -> Result<()> {
    const NUM_THREADS: usize = 3;
    const CALLS_PER_THREAD: usize = 100;

    let dispatcher: Arc<Dispatcher> = Arc::new(new_dispatcher()?);
    let (tx, rx): (Sender<u16>, Receiver<u16>) = crossbeam_channel::unbounded();

    let mut handles: Vec<JoinHandle<Result<()>>> = Vec::with_capacity(NUM_THREADS);
    for _ in 0..NUM_THREADS {
        let dispatcher: Arc<Dispatcher> = dispatcher.clone();
        let tx: Sender<u16> = tx.clone();
        handles.push(thread::spawn(move || -> Result<()> {
            for _ in 0..CALLS_PER_THREAD {
                let response: String = dispatcher.dispatch(DOT3_INCR_LEN_NAME, "{}")?;
                tx.send(declared_length(&response)?)?;
            }
            Ok(())
        }));
    }
    drop(tx);

    for handle in handles {
        match handle.join() {
            Ok(result) => result?,
            Err(_) => anyhow::bail!("dispatch thread panicked"),
        }
    }

    let mut lengths: Vec<u16> = rx.iter().collect();
    lengths.sort_unstable();
    let expected: Vec<u16> = (50..50 + (NUM_THREADS * CALLS_PER_THREAD) as u16).collect();
    ensure_eq!(lengths, expected);
    Ok(())
}

/// A request line that is not valid UTF-8 gets an error line and the requests after it are still served.
#[test]
fn serve_survives_invalid_utf8() -> Result<()> {
    let dispatcher: Dispatcher = new_dispatcher()?;

    let mut input: Vec<u8> = Vec::new();
    input.extend_from_slice(b"{\"handler\":\"dot3_incr_len\",\"request\":\"\xff\xfe\"}\n");
    input.extend_from_slice(Request::new(DOT3_INCR_LEN_NAME, "{}").to_json()?.as_bytes());
    input.push(b'\n');

    let mut output: Vec<u8> = Vec::new();
    ensure_eq!(dispatcher.serve(input.as_slice(), &mut output)?, 2);

    let output: String = String::from_utf8(output)?;
    let lines: Vec<&str> = output.lines().collect();
    ensure_eq!(lines.len(), 2);
    let error: ErrorResponse = serde_json::from_str(lines[0])?;
    if !error.error.contains("UTF-8") {
        anyhow::bail!("unexpected error cause {:?}", error.error);
    }
    ensure_eq!(declared_length(lines[1])?, 50);
    Ok(())
}

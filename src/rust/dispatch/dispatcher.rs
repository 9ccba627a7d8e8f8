// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//======================================================================================================================
// Imports
//======================================================================================================================

use crate::{
    dispatch::{
        callback::Callback,
        request::{
            ErrorResponse,
            Request,
        },
    },
    runtime::fail::Fail,
};
use ::libc::{
    EEXIST,
    EINVAL,
    ENOENT,
};
use ::std::{
    collections::HashMap,
    io::{
        BufRead,
        Write,
    },
    str,
    sync::Arc,
};

//======================================================================================================================
// Structures
//======================================================================================================================

/// Registry of callbacks keyed by name.
#[derive(Default)]
pub struct Dispatcher {
    callbacks: HashMap<String, Arc<dyn Callback>>,
}

//======================================================================================================================
// Associated Functions
//======================================================================================================================

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `callback` under its own name. Names must be unique.
    pub fn register(&mut self, callback: Arc<dyn Callback>) -> Result<(), Fail> {
        let name: String = callback.name().to_string();
        if self.callbacks.contains_key(&name) {
            let cause: String = format!("callback already registered (name={:?})", name);
            error!("register(): {}", cause);
            return Err(Fail::new(EEXIST, &cause));
        }
        info!("register(): name={:?}", name);
        self.callbacks.insert(name, callback);
        Ok(())
    }

    /// Names of all registered callbacks, sorted.
    pub fn handlers(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.callbacks.keys().map(|name| name.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Invokes the callback registered under `handler`.
    pub fn dispatch(&self, handler: &str, request: &str) -> Result<String, Fail> {
        match self.callbacks.get(handler) {
            Some(callback) => callback.cb(request),
            None => {
                let cause: String = format!("no callback registered (name={:?})", handler);
                Err(Fail::new(ENOENT, &cause))
            },
        }
    }

    /// Serves a single request line and returns the line to write back. Failures turn into an error line.
    pub fn handle_line(&self, line: &str) -> String {
        let result: Result<String, Fail> = match Request::parse(line) {
            Ok(request) => self.dispatch(&request.handler, &request.request),
            Err(e) => Err(e),
        };
        match result {
            Ok(response) => response,
            Err(e) => Self::error_line(&e),
        }
    }

    /// Reads request lines from `reader` until end of input, writing one response line per request to `writer`.
    /// Blank lines are skipped and lines that are not valid UTF-8 get an error line. Only I/O errors end the loop.
    /// Returns the number of requests served.
    pub fn serve<R: BufRead, W: Write>(&self, mut reader: R, mut writer: W) -> Result<usize, Fail> {
        let mut served: usize = 0;
        let mut buf: Vec<u8> = Vec::new();
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }

            let response: String = match str::from_utf8(&buf) {
                Ok(line) => {
                    let line: &str = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    self.handle_line(line)
                },
                Err(e) => {
                    let cause: String = format!("request is not valid UTF-8 ({})", e);
                    Self::error_line(&Fail::new(EINVAL, &cause))
                },
            };
            writer.write_all(response.as_bytes())?;
            writer.write_all(b"\n")?;
            writer.flush()?;
            served += 1;
        }
        debug!("serve(): end of input (served={:?})", served);
        Ok(served)
    }

    /// Logs `fail` and renders it as an error line.
    fn error_line(fail: &Fail) -> String {
        warn!("serve(): {:?}", fail);
        match ErrorResponse::new(fail).to_json() {
            Ok(json) => json,
            Err(_) => String::from(r#"{"error":"internal error"}"#),
        }
    }
}

//======================================================================================================================
// Unit Tests
//======================================================================================================================

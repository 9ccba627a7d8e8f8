// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//==============================================================================
// Imports
//==============================================================================

use ::flexi_logger::Logger;
use ::std::sync::Once;

//==============================================================================
// Static Variables
//==============================================================================

/// Guardian to the logging initialize function.
static INIT_LOG: Once = Once::new();

/// Log specification used when neither `RUST_LOG` nor the caller provides one.
pub const DEFAULT_LOG_SPEC: &str = "info";

//==============================================================================
// Standalone Functions
//==============================================================================

/// Initializes logging features. The `RUST_LOG` environment variable takes precedence over `spec`. Log records go to
/// stderr so that stdout stays reserved for responses.
pub fn initialize(spec: &str) {
    INIT_LOG.call_once(|| {
        let logger = match Logger::try_with_env_or_str(spec) {
            Ok(logger) => logger,
            Err(e) => {
                eprintln!("WARN: invalid log specification {:?} ({}), falling back to {:?}", spec, e, DEFAULT_LOG_SPEC);
                Logger::with(flexi_logger::LogSpecification::info())
            },
        };
        if let Err(e) = logger.log_to_stderr().start() {
            eprintln!("WARN: failed to start logger ({})", e);
        }
    });
}

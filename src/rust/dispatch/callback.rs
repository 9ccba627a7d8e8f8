// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//======================================================================================================================
// Imports
//======================================================================================================================

use crate::runtime::fail::Fail;

//======================================================================================================================
// Traits
//======================================================================================================================

/// A named request handler. Callbacks may be invoked from several threads at once and must synchronize any state
/// they keep.
pub trait Callback: Send + Sync {
    /// Name requests use to address this callback.
    fn name(&self) -> &str;

    /// Handles an opaque request string and returns the response string.
    fn cb(&self, request: &str) -> Result<String, Fail>;
}

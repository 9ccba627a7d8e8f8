// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//! Routes request lines to named callbacks and writes their responses back, one line each.

mod callback;
mod dispatcher;
mod request;

//======================================================================================================================
// Exports
//======================================================================================================================

pub use self::{
    callback::Callback,
    dispatcher::Dispatcher,
    request::{
        ErrorResponse,
        Request,
    },
};

// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

mod dot3_incr_len;
mod response;

//======================================================================================================================
// Exports
//======================================================================================================================

pub use self::{
    dot3_incr_len::{
        Dot3IncrLen,
        DOT3_INCR_LEN_NAME,
        DST_ADDR,
        FIRST_LENGTH,
        MAX_LENGTH,
        MIN_LENGTH,
        SRC_ADDR,
    },
    response::ResponseRecord,
};

// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//======================================================================================================================
// Exports
//======================================================================================================================

pub mod fail;
pub mod hex;
pub mod logging;
pub mod network;

pub use self::fail::Fail;

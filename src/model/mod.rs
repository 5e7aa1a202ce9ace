/******************************************************************************
   Author: Dashboard Platform Team
   Date: 18/10/26
******************************************************************************/
/// Token pair, stored credentials and auth endpoint payloads
pub mod auth;
/// Named endpoint table and REST path helpers
pub mod endpoints;
/// Request descriptors, header building and the single-retry state machine
pub mod http;

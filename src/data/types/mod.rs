//! Request parameters for the Data API. Responses are the shared resources in
//! [`crate::types::response`].

pub mod request;

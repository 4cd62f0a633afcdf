use crate::RequestId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Request one page of characters from the upstream API.
    FetchPage { request: RequestId, page: u32 },
}

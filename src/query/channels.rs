//! Query parameters for channel endpoints

use crate::core::ChannelType;
use crate::query::params::QueryParams;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Asc,
    Desc,
}

impl Order {
    pub fn as_str(&self) -> &'static str {
        match self {
            Order::Asc => "asc",
            Order::Desc => "desc",
        }
    }
}

/// Options for `GET /channels`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListChannelsOptions {
    /// Language code, e.g. `en`, `ja`, `zh`
    pub lang: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub order: Option<Order>,
    pub org: Option<String>,
    /// Channel field to sort by
    pub sort: Option<String>,
    pub channel_type: Option<ChannelType>,
}

impl ListChannelsOptions {
    pub fn to_query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params
            .push_opt("lang", self.lang.as_deref())
            .push_opt("limit", self.limit)
            .push_opt("offset", self.offset)
            .push_opt("order", self.order.map(|order| order.as_str()))
            .push_opt("org", self.org.as_deref())
            .push_opt("sort", self.sort.as_deref())
            .push_opt("type", self.channel_type.map(|kind| kind.as_str()));
        params
    }
}

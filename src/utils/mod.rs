pub(crate) mod date;
pub(crate) mod debug;
pub(crate) mod jq;
pub(crate) mod timezone;

pub(crate) use date::parse_date_input;
pub(crate) use debug::{debug_enabled, set_debug};
pub(crate) use jq::filter_json;
pub(crate) use timezone::Timezone;

pub mod request;

pub use request::{
    FieldValue, MouField, MouRequest, PARTNERSHIP_TYPES, RequestBuilder, date_floor,
    is_below_floor, parse_mou_date,
};

/*!
UTC offsets parsed from a timestamp's trailing timezone designator.
*/

pub use self::offset::{FixedOffset, Offset};

mod offset;

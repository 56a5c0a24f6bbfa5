use std::time::{Duration, SystemTime};

use crate::impl_reflect_opaque;

impl_reflect_opaque!(Duration, SystemTime);

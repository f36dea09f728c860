crate::reexport!(identifier);
crate::reexport!(registry);

use std::{borrow::Cow, collections::HashSet};

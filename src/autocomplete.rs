crate::reexport!(completion);
crate::reexport!(merger);

use crate::*;

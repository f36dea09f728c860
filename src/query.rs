crate::reexport!(collaborator);
crate::reexport!(state);
crate::reexport!(controller);
crate::reexport!(builder);

use crate::*;

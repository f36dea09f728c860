crate::reexport!(keymap);
crate::reexport!(surface);
crate::reexport!(adapter);
crate::reexport!(session);

use crate::*;

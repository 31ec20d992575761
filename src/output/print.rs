use slcircular::{utility, CircularList};
use std::fmt;

/// Handle-annotated rendering of a list: `#1.0:4 -> #2.0:3 -> ...`.
pub(crate) struct Verbose<'list>(pub(crate) &'list CircularList);

impl fmt::Display for Verbose<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let Verbose(list) = self;
        write!(f, "size {}:", utility::size(list))?;
        if list.is_empty() {
            return write!(f, " (empty)");
        }
        for (position, (id, value)) in list.iter().enumerate() {
            let arrow = if position == 0 { " " } else { " -> " };
            write!(f, "{}{}:{}", arrow, id, value)?;
        }
        write!(f, " -> (head)")
    }
}

pub(crate) fn yes_no(answer: bool) -> &'static str {
    if answer {
        "yes"
    } else {
        "no"
    }
}

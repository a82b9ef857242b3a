pub mod layout;

use navigation::style::ClassList;
use yew::Classes;

/// Converts a composed class list into Yew classes.
pub fn to_classes(list: &ClassList) -> Classes {
    Classes::from(list.to_string())
}

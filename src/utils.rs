pub mod common_prefix_len;
pub mod common_suffix_len;
pub mod escape_html;
pub mod myers_diff;
pub mod side;

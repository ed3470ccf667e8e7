// Display module for garage formatting and rendering
pub mod formatters;

// Re-export main functions
pub use formatters::{
    column_label, format_vehicle_display, print_column_headers, print_garage,
    print_garage_header, print_row_prefix,
};

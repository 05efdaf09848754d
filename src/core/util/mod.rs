pub mod calculate_row_bands;

pub mod chart_data;
pub mod experiment;
pub mod export;
pub mod metric;
pub mod selection;
pub mod session;
pub mod table;
pub mod visibility;

pub mod cms;
pub mod opendata;

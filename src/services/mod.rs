pub mod likes;
pub mod search;
pub mod similar;
pub mod tags;

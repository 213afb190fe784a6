pub mod graph;
pub mod cust_error;
pub mod vc_instance;
pub mod lower_bound;
pub mod tracker;
pub mod bounded_search;
pub mod harness;
pub mod logger;

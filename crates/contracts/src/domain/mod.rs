pub mod contest;
pub mod incentive;
pub mod pharmacy;
pub mod sales;

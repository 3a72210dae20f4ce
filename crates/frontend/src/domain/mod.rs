pub mod contests;
pub mod detailed_sales;
pub mod incentive_items;
pub mod pharmacies;

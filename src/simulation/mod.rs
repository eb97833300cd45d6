pub mod states;
pub mod units;
pub mod coordinates;
pub mod expansion;
pub mod frame;
pub mod profiles;
pub mod params;
pub mod forces;
pub mod integrator;
pub mod scenario;

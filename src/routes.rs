pub mod markets;

pub mod case;
pub mod epoch;
pub mod gzip;
pub mod json;
pub mod jwt;
pub mod password;
pub mod status;

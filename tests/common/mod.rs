pub mod synthetic_strand;

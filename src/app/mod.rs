pub mod ports;
pub mod ingest_use_case;
pub mod submit_use_case;
pub mod suggest_title_use_case;

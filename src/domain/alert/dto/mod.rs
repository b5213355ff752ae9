pub mod alert_ingest_result;

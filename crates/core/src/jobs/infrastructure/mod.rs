pub mod http_job_client;

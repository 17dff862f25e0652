mod attachment;
mod report;
mod status_log;

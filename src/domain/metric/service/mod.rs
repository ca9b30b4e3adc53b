pub mod metric_name_service;

pub mod index_list_service;

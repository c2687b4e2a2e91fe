pub mod token_service;

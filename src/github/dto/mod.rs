pub mod release_dto;

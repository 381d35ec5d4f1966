//! Postman collection model.

mod postman;

pub use postman::{
    PostmanAuth, PostmanAuthParam, PostmanBody, PostmanCollection, PostmanEvent, PostmanHeader,
    PostmanInfo, PostmanItem, PostmanQueryParam, PostmanRequest, PostmanScript, PostmanUrl,
    PostmanUrlStructured, PostmanVariable,
};

pub mod hotel;
pub mod page;
pub mod request;
pub mod response;

pub use hotel::Hotel;
pub use page::{Page, PageRequest, SortField};
pub use request::HotelRequest;
pub use response::{
    CityListResponse, HotelCreateResponse, HotelListResponse, HotelPageResponse, HotelResponse,
};

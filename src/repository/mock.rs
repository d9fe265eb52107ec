use mockall::mock;

use super::{
    AddressReader, AddressWriter, CategoryReader, CreditCardReader, CreditCardWriter, NewsReader,
    NotificationWriter, OrderReader, OrderWriter, ProductReader, ReviewReader, ReviewWriter,
    UserReader, UserWriter,
};
use crate::domain::{
    address::{Address, NewAddress},
    category::Category,
    credit_card::{CreditCard, NewCreditCard},
    news::NewsArticle,
    notification::{NewNotification, Notification},
    order::{NewOrder, Order, OrderStatus},
    product::{Product, ProductListQuery},
    review::{NewReview, Review},
    user::{NewUser, User},
};
use crate::repository::errors::RepositoryResult;

mock! {
    pub ProductReader {}

    impl ProductReader for ProductReader {
        fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
        fn list_products(&self, query: ProductListQuery) -> RepositoryResult<(usize, Vec<Product>)>;
    }
}

mock! {
    pub CategoryReader {}

    impl CategoryReader for CategoryReader {
        fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
    }
}

mock! {
    pub OrderReader {}

    impl OrderReader for OrderReader {
        fn get_order_by_id(&self, id: i32) -> RepositoryResult<Option<Order>>;
        fn list_orders_for_user(&self, user_id: i32) -> RepositoryResult<Vec<Order>>;
    }
}

mock! {
    pub OrderWriter {}

    impl OrderWriter for OrderWriter {
        fn create_order(&self, new_order: &NewOrder) -> RepositoryResult<Order>;
        fn update_order_status(&self, order_id: i32, status: OrderStatus) -> RepositoryResult<Order>;
    }
}

mock! {
    pub AddressReader {}

    impl AddressReader for AddressReader {
        fn get_address_by_id(&self, id: i32) -> RepositoryResult<Option<Address>>;
        fn list_addresses(&self, user_id: i32) -> RepositoryResult<Vec<Address>>;
    }
}

mock! {
    pub AddressWriter {}

    impl AddressWriter for AddressWriter {
        fn create_address(&self, new_address: &NewAddress) -> RepositoryResult<Address>;
        fn delete_address(&self, address_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub CreditCardReader {}

    impl CreditCardReader for CreditCardReader {
        fn get_credit_card_by_id(&self, id: i32) -> RepositoryResult<Option<CreditCard>>;
        fn list_credit_cards(&self, user_id: i32) -> RepositoryResult<Vec<CreditCard>>;
    }
}

mock! {
    pub CreditCardWriter {}

    impl CreditCardWriter for CreditCardWriter {
        fn create_credit_card(&self, new_card: &NewCreditCard) -> RepositoryResult<CreditCard>;
        fn delete_credit_card(&self, card_id: i32) -> RepositoryResult<()>;
    }
}

mock! {
    pub ReviewReader {}

    impl ReviewReader for ReviewReader {
        fn list_product_reviews(&self, product_id: i32) -> RepositoryResult<Vec<(Review, String)>>;
        fn get_user_review(&self, user_id: i32, product_id: i32) -> RepositoryResult<Option<Review>>;
    }
}

mock! {
    pub ReviewWriter {}

    impl ReviewWriter for ReviewWriter {
        fn save_review(&self, new_review: &NewReview) -> RepositoryResult<Review>;
    }
}

mock! {
    pub NewsReader {}

    impl NewsReader for NewsReader {
        fn get_news_by_id(&self, id: i32) -> RepositoryResult<Option<NewsArticle>>;
        fn list_published_news(&self) -> RepositoryResult<Vec<NewsArticle>>;
    }
}

mock! {
    pub NotificationWriter {}

    impl NotificationWriter for NotificationWriter {
        fn create_notification(&self, new_notification: &NewNotification) -> RepositoryResult<Notification>;
    }
}

mock! {
    pub UserReader {}

    impl UserReader for UserReader {
        fn get_user_by_id(&self, id: i32) -> RepositoryResult<Option<User>>;
        fn get_user_by_email(&self, email: &str) -> RepositoryResult<Option<User>>;
    }
}

mock! {
    pub UserWriter {}

    impl UserWriter for UserWriter {
        fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User>;
    }
}

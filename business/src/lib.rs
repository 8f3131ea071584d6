pub mod application {
    pub mod auth {
        pub mod complete_onboarding;
        pub mod login;
        pub mod logout;
        pub mod register;
        pub mod resolve_start;
    }
    pub mod cart {
        pub mod add_item;
        pub mod get_cart;
    }
    pub mod notification {
        pub mod device_token;
        pub mod get_all;
        pub mod mark_read;
    }
    pub mod order {
        pub mod get_mine;
        pub mod place;
    }
    pub mod payment {
        pub mod create;
        pub mod get_status;
    }
    pub mod product {
        pub mod get_by_id;
        pub mod get_home;
        pub mod recent_searches;
        pub mod search;
    }
    pub mod user {
        pub mod get_profile;
        pub mod update_profile;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod resource;
    pub mod shared {
        pub mod validation;
    }
    pub mod session {
        pub mod model;
        pub mod store;
    }
    pub mod auth {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod complete_onboarding;
            pub mod login;
            pub mod logout;
            pub mod register;
            pub mod resolve_start;
        }
    }
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add_item;
            pub mod get_cart;
        }
    }
    pub mod notification {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod device_token;
            pub mod get_all;
            pub mod mark_read;
        }
    }
    pub mod order {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod get_mine;
            pub mod place;
        }
    }
    pub mod payment {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod get_status;
        }
    }
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod recent_searches;
        pub mod repository;
        pub mod use_cases {
            pub mod get_by_id;
            pub mod get_home;
            pub mod recent_searches;
            pub mod search;
        }
    }
    pub mod user {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod get_profile;
            pub mod update_profile;
        }
    }
}

pub mod shared {
    pub mod core {
        pub mod filter;
        pub mod patch;
        pub mod resource;
    }
    pub mod application {
        pub mod notifier;
        pub mod resource_service;
    }
    pub mod infrastructure {
        pub mod database;
        pub mod event_bus;
        pub mod resource_store;
    }
}

pub mod modules {
    pub mod walks {
        pub mod core {
            pub mod filter;
            pub mod patch;
            pub mod walk;
        }
        pub mod inbound {
            pub mod http;
        }
    }
    pub mod assignments {
        pub mod core {
            pub mod assignment;
            pub mod filter;
            pub mod patch;
        }
        pub mod inbound {
            pub mod http;
        }
    }
    pub mod events {
        pub mod core {
            pub mod event;
            pub mod filter;
        }
        pub mod inbound {
            pub mod http;
        }
    }
    pub mod system {
        pub mod inbound {
            pub mod http;
        }
    }
}

pub mod shell;

#[cfg(test)]
pub mod tests {
    pub mod fixtures;

    pub mod e2e {
        pub mod walk_service_tests;
    }
}

pub mod handlers {
    #[path = "report_handler.rs"]
    pub mod report_handler;
}

pub mod models {
    #[path = "report.rs"]
    pub mod report;
}

pub mod routes {
    #[path = "report_route.rs"]
    pub mod report_route;
}

pub mod services {
    #[path = "report_store.rs"]
    pub mod report_store;
}

pub mod helpers {
    #[path = "config.rs"]
    pub mod config;

    #[path = "request_log.rs"]
    pub mod request_log;
}

pub mod route;

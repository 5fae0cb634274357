pub mod shared {
    pub mod core {
        pub mod primitives;
    }
    pub mod application {
        pub mod authorization;
        pub mod bulk;
        pub mod errors;
    }
    pub mod infrastructure {
        pub mod directory;
        pub mod event_store;
        pub mod notification_sink;
    }
}

pub mod modules {
    pub mod attendance {
        pub mod core {
            pub mod break_policy;
            pub mod events;
            pub mod evolve;
            pub mod intents;
            pub mod ledger;
            pub mod projections;
            pub mod snapshot;
            pub mod state;
        }
        pub mod use_cases {
            pub mod clock_tokens {
                pub mod service;
                pub mod token;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod check_clock_in_allowed {
                pub mod gate;
                pub mod handler;
            }
            pub mod record_clock_action {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod get_attendance_session {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod project_ledger {
                pub mod handler;
            }
            pub mod list_time_entries {
                pub mod queries_port;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod review_time_entries {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod clock_token_cache;
                pub mod clock_token_store;
                pub mod intent_dispatch;
                pub mod ledger;
                pub mod ledger_in_memory;
                pub mod session_streams;
            }
        }
    }
    pub mod corrections {
        pub mod core {
            pub mod decide;
            pub mod request;
        }
        pub mod use_cases {
            pub mod submit_correction {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod review_correction {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod repository;
                pub mod repository_in_memory;
            }
        }
    }
    pub mod payroll {
        pub mod core {
            pub mod pay;
            pub mod sick_leave;
        }
        pub mod use_cases {
            pub mod compute_pay {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod export_payroll {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod year_end_carryover {
                pub mod handler;
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod sick_leave_in_memory;
                pub mod sick_leave_repository;
            }
        }
    }
    pub mod settings {
        pub mod core {
            pub mod attendance_settings;
        }
        pub mod use_cases {
            pub mod update_attendance_settings {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod settings_store;
            }
        }
    }
}

pub mod shell;

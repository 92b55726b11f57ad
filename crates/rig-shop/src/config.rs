//! Shop configuration.

/// Configuration for a RigForge shop instance.
#[derive(Debug, Clone)]
pub struct ShopConfig {
    /// Application name.
    pub name: String,
    /// Namespace prefix for wizard session bags.
    pub session_namespace: String,
    /// Name of the computer record store.
    pub computer_store: String,
    /// Name of the order record store.
    pub order_store: String,
    /// Name of the session store.
    pub session_store: String,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            name: "RigForge".to_string(),
            session_namespace: "computer_builder".to_string(),
            computer_store: "computers".to_string(),
            order_store: "orders".to_string(),
            session_store: "sessions".to_string(),
        }
    }
}

impl ShopConfig {
    /// Create a configuration with the given application name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the session namespace prefix.
    pub fn with_session_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.session_namespace = namespace.into();
        self
    }

    /// Set the record store names.
    pub fn with_stores(
        mut self,
        computers: impl Into<String>,
        orders: impl Into<String>,
        sessions: impl Into<String>,
    ) -> Self {
        self.computer_store = computers.into();
        self.order_store = orders.into();
        self.session_store = sessions.into();
        self
    }
}

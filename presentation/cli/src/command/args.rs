use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "storefront")]
#[command(author, version, about = "Storefront client: catalog, cart, orders and payments")]
pub struct Cli {
    /// Keep the session in memory instead of the data directory
    #[arg(long, global = true)]
    pub ephemeral: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show which screen the app would open on
    Start,
    /// Mark the onboarding as seen
    Onboard,
    /// Log in with a phone number or email
    Login {
        /// Phone number or email
        #[arg(short, long)]
        identifier: String,

        #[arg(short, long)]
        password: String,

        /// Remember the credentials for silent login
        #[arg(short, long)]
        remember: bool,
    },
    /// Create an account
    Register {
        #[arg(short = 'n', long)]
        full_name: String,

        #[arg(short, long)]
        email: String,

        #[arg(short = 't', long)]
        phone: String,

        #[arg(short, long)]
        password: String,
    },
    /// Forget the stored session
    Logout,
    /// List the catalog
    Home,
    /// Show one product with its attributes
    Product { id: i64 },
    /// Search the catalog by keyword
    Search { keyword: String },
    /// Show or clear recent searches
    Recent {
        #[arg(long)]
        clear: bool,
    },
    /// Show the cart
    Cart,
    /// Add one unit of a product attribute to the cart
    Add { product_att_id: i64 },
    /// Place or list orders
    Order {
        #[command(subcommand)]
        action: OrderAction,
    },
    /// Pay an order with ZaloPay and wait for confirmation
    Pay { order_id: i64 },
    /// Check the payment status of an order once
    PaymentStatus { order_id: i64 },
    /// Show or update the profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
    /// Manage notifications
    Notifications {
        #[command(subcommand)]
        action: NotificationAction,
    },
}

#[derive(Subcommand)]
pub enum OrderAction {
    /// Order the current cart, or request a repair
    Place {
        /// Repair request instead of a purchase; the cart is not used
        #[arg(long)]
        repair: bool,

        #[arg(short = 't', long)]
        phone: String,

        #[arg(short, long)]
        email: String,

        #[arg(short, long, default_value = "")]
        address: String,

        #[arg(short, long)]
        description: Option<String>,
    },
    /// List my orders
    List,
}

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Show my profile
    Show,
    /// Update the given fields
    Update {
        #[arg(long)]
        full_name: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        address: Option<String>,

        #[arg(long)]
        avatar: Option<String>,

        /// Date of birth, as the backend expects it (e.g. 1990-04-30)
        #[arg(long)]
        dob: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum NotificationAction {
    /// List notifications
    List,
    /// Mark a notification as read
    Read { id: i64 },
    /// Register this device for push notifications
    RegisterDevice { token: String },
    /// Stop push notifications for this device
    RemoveDevice { token: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn should_have_consistent_argument_definitions() {
        Cli::command().debug_assert();
    }

    #[test]
    fn should_parse_repair_order_without_address() {
        let cli = Cli::try_parse_from([
            "storefront",
            "order",
            "place",
            "--repair",
            "-t",
            "0912345678",
            "-e",
            "a@shop.vn",
        ])
        .unwrap();

        match cli.command {
            Commands::Order {
                action: OrderAction::Place { repair, address, .. },
            } => {
                assert!(repair);
                assert_eq!(address, "");
            }
            _ => panic!("expected order place"),
        }
    }

    #[test]
    fn should_accept_global_ephemeral_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["storefront", "cart", "--ephemeral"]).unwrap();

        assert!(cli.ephemeral);
    }
}

use anyhow::{anyhow, bail};
use tokio::sync::broadcast::Receiver;

use business::domain::auth::use_cases::login::LoginParams;
use business::domain::auth::use_cases::register::RegisterParams;
use business::domain::order::model::NewOrderItem;
use business::domain::order::use_cases::place::PlaceOrderParams;
use business::domain::order::value_objects::OrderType;
use business::domain::payment::model::PaymentState;
use business::domain::resource::Resource;
use business::domain::user::use_cases::update_profile::UpdateProfileParams;

use view_models::message_bus::UiMessage;
use view_models::payment::PaymentProgress;
use view_models::state::LoadState;

use super::args::{Commands, NotificationAction, OrderAction, ProfileAction};
use super::output;
use crate::setup::dependency_injection::DependencyContainer;

pub async fn execute(command: Commands, container: &DependencyContainer) -> anyhow::Result<()> {
    let mut messages = container.bus.subscribe();
    let outcome = dispatch(command, container).await;
    print_notices(&mut messages);
    outcome
}

async fn dispatch(command: Commands, c: &DependencyContainer) -> anyhow::Result<()> {
    match command {
        Commands::Start => {
            let destination = into_result(c.auth.resolve_start().await)?;
            println!("{}", destination);
        }
        Commands::Onboard => into_result(c.auth.complete_onboarding().await)?,
        Commands::Login {
            identifier,
            password,
            remember,
        } => {
            into_result(
                c.auth
                    .login(LoginParams {
                        identifier,
                        password,
                        remember,
                    })
                    .await,
            )?;
            println!("Logged in");
        }
        Commands::Register {
            full_name,
            email,
            phone,
            password,
        } => {
            let profile = into_result(
                c.auth
                    .register(RegisterParams {
                        full_name,
                        email,
                        phone_number: phone,
                        password,
                    })
                    .await,
            )?;
            println!("{}", output::profile(&profile));
        }
        Commands::Logout => {
            into_result(c.auth.logout().await)?;
            println!("Logged out");
        }
        Commands::Home => {
            c.products.load_home().await;
            for product in loaded(c.products.state().home)? {
                println!("{}", output::product_line(&product));
            }
        }
        Commands::Product { id } => {
            c.products.load_detail(id).await;
            println!("{}", output::product_detail(&loaded(c.products.state().detail)?));
        }
        Commands::Search { keyword } => {
            c.products.search(&keyword).await;
            let results = loaded(c.products.state().search_results)?;
            if results.is_empty() {
                println!("No products match \"{}\"", keyword.trim());
            }
            for product in results {
                println!("{}", output::product_line(&product));
            }
        }
        Commands::Recent { clear } => {
            if clear {
                c.products.clear_recent_searches().await;
            } else {
                c.products.load_recent_searches().await;
            }
            for keyword in c.products.state().recent_searches {
                println!("{}", keyword);
            }
        }
        Commands::Cart => {
            c.cart.load_cart().await;
            println!("{}", output::cart(&loaded(c.cart.state().cart)?));
        }
        Commands::Add { product_att_id } => {
            into_result(c.cart.add_to_cart(product_att_id).await)?;
            if let Some(cart) = c.cart.state().cart.data() {
                println!("{}", output::cart(cart));
            }
        }
        Commands::Order { action } => order(action, c).await?,
        Commands::Pay { order_id } => pay(order_id, c).await?,
        Commands::PaymentStatus { order_id } => {
            let status = into_result(c.payment.check_status(order_id).await)?;
            let state = match status.state() {
                PaymentState::Pending => "pending".to_string(),
                PaymentState::Paid => "paid".to_string(),
                PaymentState::Other(code) => format!("closed (code {})", code),
            };
            println!("Order #{}: {}", status.order_id, state);
        }
        Commands::Profile { action } => match action {
            ProfileAction::Show => {
                c.profile.load().await;
                println!("{}", output::profile(&loaded(c.profile.state().profile)?));
            }
            ProfileAction::Update {
                full_name,
                phone,
                address,
                avatar,
                dob,
            } => {
                let profile = into_result(
                    c.profile
                        .update(UpdateProfileParams {
                            full_name,
                            phone_number: phone,
                            address,
                            avatar,
                            date_of_birth: dob,
                        })
                        .await,
                )?;
                println!("{}", output::profile(&profile));
            }
        },
        Commands::Notifications { action } => notifications(action, c).await?,
    }
    Ok(())
}

async fn order(action: OrderAction, c: &DependencyContainer) -> anyhow::Result<()> {
    match action {
        OrderAction::List => {
            c.cart.load_orders().await;
            for order in loaded(c.cart.state().orders)? {
                println!("{}", output::order_line(&order));
            }
        }
        OrderAction::Place {
            repair,
            phone,
            email,
            address,
            description,
        } => {
            let (order_type, total_price, items) = if repair {
                (OrderType::Repair, 0, Vec::new())
            } else {
                c.cart.load_cart().await;
                let cart = loaded(c.cart.state().cart)?;
                let items = cart
                    .items()
                    .iter()
                    .map(|item| NewOrderItem {
                        cart_item_id: item.id,
                        product_att_id: item.product_att_id,
                        quantity: item.quantity,
                    })
                    .collect();
                (OrderType::Purchase, cart.total_price(), items)
            };

            let placed = into_result(
                c.cart
                    .place_order(PlaceOrderParams {
                        order_type: order_type.code(),
                        phone_number: phone,
                        email,
                        address,
                        description,
                        total_price,
                        items,
                    })
                    .await,
            )?;
            println!("{}", output::order_line(&placed));
        }
    }
    Ok(())
}

async fn pay(order_id: i64, c: &DependencyContainer) -> anyhow::Result<()> {
    let mut progress = c.payment.subscribe();
    let announcer = tokio::spawn(async move {
        let mut shown = false;
        while progress.changed().await.is_ok() {
            if let PaymentProgress::AwaitingConfirmation { payment, .. } = &*progress.borrow_and_update() {
                if !shown {
                    println!("Open to pay: {}", payment.order_url);
                    println!("Waiting for confirmation...");
                    shown = true;
                }
            }
        }
    });

    let result = c.payment.pay(order_id).await;
    announcer.abort();

    let status = into_result(result)?;
    match status.state() {
        PaymentState::Paid => println!("Order #{} paid", status.order_id),
        _ => bail!(
            status
                .message
                .unwrap_or_else(|| format!("Payment for order #{} was not completed", status.order_id))
        ),
    }
    Ok(())
}

async fn notifications(action: NotificationAction, c: &DependencyContainer) -> anyhow::Result<()> {
    let vm = &c.notifications;
    match action {
        NotificationAction::List => {
            vm.load().await;
            let state = vm.state();
            for notification in loaded(state.notifications)? {
                println!("{}", output::notification_line(&notification));
            }
            println!("{} unread", state.unread);
        }
        NotificationAction::Read { id } => {
            vm.load().await;
            loaded(vm.state().notifications)?;
            if !vm.mark_as_read(id).await {
                println!("Notification #{} is already read or does not exist", id);
            }
            vm.wait_pending().await;
        }
        NotificationAction::RegisterDevice { token } => {
            into_result(vm.register_device_token(&token).await)?;
            println!("Device registered");
        }
        NotificationAction::RemoveDevice { token } => {
            into_result(vm.remove_device_token(&token).await)?;
            println!("Device removed");
        }
    }
    Ok(())
}

fn into_result<T>(resource: Resource<T>) -> anyhow::Result<T> {
    resource.into_result().map_err(|message| anyhow!(message))
}

fn loaded<T>(state: LoadState<T>) -> anyhow::Result<T> {
    match state {
        LoadState::Loaded(data) => Ok(data),
        LoadState::Error(message) => Err(anyhow!(message)),
        LoadState::Idle | LoadState::Loading => bail!("Nothing was loaded"),
    }
}

/// Errors reach the user through the command's result, so only
/// informational notices are printed here.
fn print_notices(messages: &mut Receiver<UiMessage>) {
    while let Ok(message) = messages.try_recv() {
        if let UiMessage::Info(text) = message {
            eprintln!("{}", text);
        }
    }
}

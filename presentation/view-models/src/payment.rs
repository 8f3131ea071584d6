use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

use business::domain::payment::model::{PaymentOrder, PaymentState, PaymentStatus};
use business::domain::payment::use_cases::create::{CreatePaymentParams, CreatePaymentUseCase};
use business::domain::payment::use_cases::get_status::{
    GetPaymentStatusParams, GetPaymentStatusUseCase,
};
use business::domain::resource::Resource;

use crate::message_bus::MessageBus;

pub const PAYMENT_TIMEOUT_MESSAGE: &str =
    "Payment was not confirmed in time. Please check your order status later.";

/// How often and how long the payment status is polled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    pub interval: Duration,
    pub max_attempts: u32,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(3),
            max_attempts: 20,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum PaymentProgress {
    #[default]
    Idle,
    Creating,
    /// Payment page is open; `attempts` polls have come back pending so far.
    AwaitingConfirmation { payment: PaymentOrder, attempts: u32 },
    Completed(PaymentStatus),
    Failed(String),
}

pub struct PaymentViewModel {
    create_payment: Arc<dyn CreatePaymentUseCase>,
    get_status: Arc<dyn GetPaymentStatusUseCase>,
    policy: PollPolicy,
    bus: MessageBus,
    state: watch::Sender<PaymentProgress>,
}

impl PaymentViewModel {
    pub fn new(
        create_payment: Arc<dyn CreatePaymentUseCase>,
        get_status: Arc<dyn GetPaymentStatusUseCase>,
        policy: PollPolicy,
        bus: MessageBus,
    ) -> Self {
        Self {
            create_payment,
            get_status,
            policy,
            bus,
            state: watch::Sender::new(PaymentProgress::Idle),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<PaymentProgress> {
        self.state.subscribe()
    }

    pub fn state(&self) -> PaymentProgress {
        self.state.borrow().clone()
    }

    /// Opens a ZaloPay payment for the order, then polls its status until it
    /// leaves pending, a poll fails, or the attempt budget runs out.
    pub async fn pay(&self, order_id: i64) -> Resource<PaymentStatus> {
        self.state.send_replace(PaymentProgress::Creating);

        let payment = match self
            .create_payment
            .execute(CreatePaymentParams { order_id })
            .await
        {
            Resource::Success(payment) => payment,
            other => return self.fail(other.message().unwrap_or_default().to_string()),
        };
        tracing::info!(order = order_id, url = %payment.order_url, "Payment created");
        self.state.send_replace(PaymentProgress::AwaitingConfirmation {
            payment,
            attempts: 0,
        });

        self.poll(order_id).await
    }

    /// One status check without polling.
    pub async fn check_status(&self, order_id: i64) -> Resource<PaymentStatus> {
        let result = self
            .get_status
            .execute(GetPaymentStatusParams { order_id })
            .await;
        if let Some(message) = result.message() {
            self.bus.error(message);
        }
        result
    }

    async fn poll(&self, order_id: i64) -> Resource<PaymentStatus> {
        for attempt in 1..=self.policy.max_attempts {
            tokio::time::sleep(self.policy.interval).await;

            let status = match self
                .get_status
                .execute(GetPaymentStatusParams { order_id })
                .await
            {
                Resource::Success(status) => status,
                other => return self.fail(other.message().unwrap_or_default().to_string()),
            };

            if status.state().is_final() {
                return self.complete(status);
            }
            self.state.send_modify(|progress| {
                if let PaymentProgress::AwaitingConfirmation { attempts, .. } = progress {
                    *attempts = attempt;
                }
            });
        }

        tracing::warn!(order = order_id, "Payment polling gave up");
        self.fail(PAYMENT_TIMEOUT_MESSAGE.to_string())
    }

    fn complete(&self, status: PaymentStatus) -> Resource<PaymentStatus> {
        match status.state() {
            PaymentState::Paid => self.bus.info(format!("Order #{} paid", status.order_id)),
            _ => self.bus.error(
                status
                    .message
                    .clone()
                    .unwrap_or_else(|| format!("Payment for order #{} did not go through", status.order_id)),
            ),
        }
        self.state
            .send_replace(PaymentProgress::Completed(status.clone()));
        Resource::Success(status)
    }

    fn fail(&self, message: String) -> Resource<PaymentStatus> {
        let resource = Resource::error(message);
        let message = resource.message().unwrap_or_default().to_string();
        self.bus.error(&message);
        self.state.send_replace(PaymentProgress::Failed(message));
        resource
    }
}

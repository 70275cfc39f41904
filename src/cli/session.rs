//! The interactive ordering loop
//!
//! Prints the action list, reads a choice and dispatches it to the
//! [`OrderingService`] until the user exits or input ends.

use super::prompt::{Prompt, PromptError};
use super::render::{
    render_added, render_cart, render_error, render_menu, render_receipt, ACTIONS, GOODBYE,
    INVALID_CHOICE, MALFORMED_NUMBER,
};
use crate::ordering::OrderingService;
use tokio::io::{AsyncBufRead, AsyncWrite};

/// The five numbered actions offered on every iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ShowMenu,
    AddToCart,
    ViewCart,
    Checkout,
    Exit,
}

impl TryFrom<i64> for Action {
    type Error = i64;

    fn try_from(choice: i64) -> Result<Self, Self::Error> {
        match choice {
            1 => Ok(Action::ShowMenu),
            2 => Ok(Action::AddToCart),
            3 => Ok(Action::ViewCart),
            4 => Ok(Action::Checkout),
            5 => Ok(Action::Exit),
            other => Err(other),
        }
    }
}

/// Whether the loop keeps going after a step
enum Flow {
    Continue,
    Quit,
}

/// Runs the ordering loop over `input` and `output`.
///
/// Malformed numbers and rejected requests are reported and the loop
/// continues. End of input ends the session like the exit action does.
/// Only I/O failures are returned as errors.
pub async fn run_session<R, W>(
    service: &mut OrderingService,
    input: R,
    output: W,
) -> Result<(), std::io::Error>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut prompt = Prompt::new(input, output);

    loop {
        prompt.say("").await?;
        prompt.say(ACTIONS).await?;

        let Some(choice) = read_number(&mut prompt, "> ").await? else {
            break;
        };
        let Some(choice) = choice else {
            continue;
        };

        let flow = match Action::try_from(choice) {
            Ok(action) => {
                tracing::debug!(?action, "Dispatching action");
                dispatch(service, &mut prompt, action).await?
            }
            Err(other) => {
                tracing::debug!(choice = other, "Unknown action");
                prompt.say(INVALID_CHOICE).await?;
                Flow::Continue
            }
        };

        if let Flow::Quit = flow {
            break;
        }
    }

    prompt.say(GOODBYE).await?;
    Ok(())
}

async fn dispatch<R, W>(
    service: &mut OrderingService,
    prompt: &mut Prompt<R, W>,
    action: Action,
) -> std::io::Result<Flow>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    match action {
        Action::ShowMenu => prompt.say(&render_menu(&service.show_menu())).await?,
        Action::AddToCart => return add_to_cart(service, prompt).await,
        Action::ViewCart => prompt.say(&render_cart(&service.view_cart())).await?,
        Action::Checkout => match service.checkout() {
            Ok(receipt) => prompt.say(&render_receipt(&receipt)).await?,
            Err(e) => prompt.say(render_error(&e)).await?,
        },
        Action::Exit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

async fn add_to_cart<R, W>(
    service: &mut OrderingService,
    prompt: &mut Prompt<R, W>,
) -> std::io::Result<Flow>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    prompt.say(&render_menu(&service.show_menu())).await?;

    let Some(position) = read_number(prompt, "Enter the item number: ").await? else {
        return Ok(Flow::Quit);
    };
    let Some(position) = position else {
        return Ok(Flow::Continue);
    };

    let Some(quantity) = read_number(prompt, "Enter the quantity: ").await? else {
        return Ok(Flow::Quit);
    };
    let Some(quantity) = quantity else {
        return Ok(Flow::Continue);
    };

    match service.add_to_cart(position, quantity) {
        Ok(confirmation) => prompt.say(&render_added(&confirmation)).await?,
        Err(e) => prompt.say(render_error(&e)).await?,
    }
    Ok(Flow::Continue)
}

/// Asks for a number.
///
/// The outer `Option` is `None` at end of input. The inner one is `None`
/// when the line was not a number; the user has already been told.
async fn read_number<R, W>(
    prompt: &mut Prompt<R, W>,
    question: &str,
) -> std::io::Result<Option<Option<i64>>>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    match prompt.ask_number(question).await {
        Ok(Some(n)) => Ok(Some(Some(n))),
        Ok(None) => Ok(None),
        Err(PromptError::Malformed { input }) => {
            tracing::debug!(input = %input, "Malformed number");
            prompt.say(MALFORMED_NUMBER).await?;
            Ok(Some(None))
        }
        Err(PromptError::Io(e)) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choices_map_to_actions() {
        assert_eq!(Action::try_from(1), Ok(Action::ShowMenu));
        assert_eq!(Action::try_from(5), Ok(Action::Exit));
        assert_eq!(Action::try_from(0), Err(0));
        assert_eq!(Action::try_from(6), Err(6));
    }
}

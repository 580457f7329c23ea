mod factories;
mod mediator;

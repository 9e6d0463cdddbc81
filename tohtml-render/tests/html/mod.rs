mod page;
mod reconcile;

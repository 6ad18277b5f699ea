pub mod stateful_list;
pub mod terminal_surface;

pub trait Stateful<T> {
    fn next(&mut self);
    fn previous(&mut self);
}

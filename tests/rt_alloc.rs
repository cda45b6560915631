use std::alloc::{GlobalAlloc, Layout};
use std::cell::Cell;

use warpfold::param::Binding;
use warpfold::{BlockInputs, Bindings, Param, ParamEvent, WarpFoldOsc};

thread_local! {
    static ALLOC_COUNT: Cell<usize> = const { Cell::new(0) };
}

struct CountingAllocator;

unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        ALLOC_COUNT.with(|c| c.set(c.get() + 1));
        unsafe { std::alloc::System.alloc(layout) }
    }
    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { std::alloc::System.dealloc(ptr, layout) }
    }
}

#[global_allocator]
static A: CountingAllocator = CountingAllocator;

fn alloc_count() -> usize {
    ALLOC_COUNT.with(|c| c.get())
}

#[test]
fn process_block_does_not_allocate() {
    let signal = vec![0.5; 256];
    let frequency = vec![330.0; 256];
    let mut out = vec![0.0; 256];

    for mask in 0..8u8 {
        let bindings = Bindings::scalar()
            .with(Param::Frequency, Binding::from_connected(mask & 1 != 0))
            .with(Param::Fold, Binding::from_connected(mask & 2 != 0))
            .with(Param::Warp, Binding::from_connected(mask & 4 != 0));

        let mut osc = WarpFoldOsc::new();
        osc.configure(48_000.0, bindings).unwrap();
        let handle = osc.control_handle();
        let inputs = BlockInputs::default()
            .with_frequency(&frequency)
            .with_fold(&signal)
            .with_warp(&signal);

        let before = alloc_count();
        for i in 0..1_000 {
            handle.set_fold((i % 10) as f64 / 10.0);
            handle.set_frequency(110.0 + i as f64);
            if i % 100 == 0 {
                handle.reset();
            }
            osc.process_block(&inputs, &mut out);
        }
        assert_eq!(
            alloc_count(),
            before,
            "process_block allocated with binding mask {mask:03b}"
        );
    }
}

#[test]
fn unconfigured_block_does_not_allocate() {
    let mut osc = WarpFoldOsc::new();
    let mut out = vec![0.0; 64];
    let before = alloc_count();
    for _ in 0..1_000 {
        osc.process_block(&BlockInputs::default(), &mut out);
    }
    assert_eq!(alloc_count(), before);
}

#[cfg(feature = "rtrb")]
#[test]
fn draining_the_event_queue_does_not_allocate() {
    use warpfold::synth::message::{event_queue, try_send};

    let (mut tx, mut rx) = event_queue();
    let mut osc = WarpFoldOsc::new();
    osc.configure(44_100.0, Bindings::scalar()).unwrap();
    let mut out = vec![0.0; 128];

    let before = alloc_count();
    for i in 0..500 {
        try_send(&mut tx, ParamEvent::scalar(Param::Warp, (i % 3) as f64 - 1.0));
        try_send(&mut tx, ParamEvent::from_int(Param::Frequency, 200 + i));
        osc.drain_events(&mut rx);
        osc.process_block(&BlockInputs::default(), &mut out);
    }
    assert_eq!(alloc_count(), before);
}
